use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClassifyRequest<'a> {
    pub text: &'a str,
}
