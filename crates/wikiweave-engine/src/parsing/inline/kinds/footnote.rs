/// `((text))`: a footnote citation.
pub struct FootnoteMark;

impl FootnoteMark {
    pub const OPEN: &'static str = "((";
    pub const CLOSE: &'static str = "))";
}
