pub mod completions;
pub mod components;
pub mod degrees;
pub mod generate;
pub mod layout;
pub mod reach;
pub mod report;
pub mod source;
pub mod walks;
