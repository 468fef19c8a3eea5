//! Built-in sample text exercising every guard

/// Sample prose with abbreviations, initials, decimals, a domain name,
/// an ellipsis and question/exclamation endings
pub const SAMPLE_TEXT: &str = concat!(
    "Dr. Smith visited the U.S. office on Jan. 2. ",
    "He said: \"We should launch v2.0 soon...\" \n",
    "This is a short paragraph. Here's a sentence with a decimal: 3.14 is pi.\n",
    "Visit openai.com for more. J. K. Rowling wrote the series. ",
    "Is this counted correctly? Yes!"
);
