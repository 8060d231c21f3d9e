pub mod none;
pub mod system;

use crate::domain::models::LinkOpenerBox;
use crate::domain::models::LinkOpenerName;

pub struct LinkOpenerManager {}

impl LinkOpenerManager {
    pub fn get(name: LinkOpenerName) -> LinkOpenerBox {
        match name {
            LinkOpenerName::System => Box::<system::SystemOpener>::default(),
            LinkOpenerName::None => Box::new(none::NoOpener {}),
        }
    }
}
