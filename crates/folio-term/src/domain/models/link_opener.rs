use async_trait::async_trait;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumVariantNames};

use super::Link;
use super::LinkError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumVariantNames, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum LinkOpenerName {
    #[default]
    System,
    None,
}

impl LinkOpenerName {
    pub fn parse(s: &str) -> Option<LinkOpenerName> {
        LinkOpenerName::iter().find(|e| e.to_string() == s)
    }
}

#[async_trait]
pub trait LinkOpener: Send + Sync {
    fn name(&self) -> LinkOpenerName;
    async fn open(&self, link: Link) -> Result<(), LinkError>;
}

pub type LinkOpenerBox = Box<dyn LinkOpener>;
