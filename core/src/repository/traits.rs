use crate::model::outline::Outline;
use anyhow::Result;

pub trait OutlineRepository {
    /// Loads every document into one decorated outline.
    fn load(&self) -> Result<Outline>;
}
