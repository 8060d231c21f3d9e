use super::Link;

#[derive(Debug, Clone)]
pub enum Action {
    OpenLink(Link),
}
