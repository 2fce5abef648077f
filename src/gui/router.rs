// src/gui/router.rs
use crate::config::options::PageKind::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::county::PAGE,
    &pages::map::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        Home              => &pages::home::PAGE,
        CountyInformation => &pages::county::PAGE,
        BridgeMap         => &pages::map::PAGE,
    }
}
