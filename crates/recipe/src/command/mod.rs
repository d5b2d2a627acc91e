mod create;
mod delete;
mod import;
mod update;

pub use create::*;
pub use import::*;

use std::ops::{Deref, DerefMut};

use mealplanner_shared::recipe::RecipeCatalog;

/// Write side of a profile's recipe library.
pub struct Command<'a> {
    catalog: &'a mut RecipeCatalog,
}

impl Deref for Command<'_> {
    type Target = RecipeCatalog;

    fn deref(&self) -> &Self::Target {
        self.catalog
    }
}

impl DerefMut for Command<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.catalog
    }
}

impl<'a> Command<'a> {
    pub fn new(catalog: &'a mut RecipeCatalog) -> Self {
        Self { catalog }
    }
}
