use serde::Serialize;

/// One of the 17 Sustainable Development Goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub code: &'static str,
    pub name: &'static str,
    pub icon_ref: &'static str,
}
