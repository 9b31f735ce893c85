/// How a bag is written out.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Style {
    /// Each distinct item once, annotated with its count.
    #[default]
    Compact,
    /// Every copy of every item.
    Verbose,
    /// JSON object mapping items to counts.
    Json,
}
