use serde::Serialize;
use crate::structs::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub accomplished: Vec<&'static Category>,
    pub outstanding: Vec<&'static Category>,
}
