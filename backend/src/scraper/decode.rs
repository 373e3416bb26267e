//! Decoding of the upstream datasvc response.
//!
//! The data service returns JavaScript of the form `define({data:[ … ]})`
//! with unquoted identifier keys. Decoding extracts the literal inside the
//! wrapper and quotes the keys so the blob parses as JSON.

use anyhow::{Context, Result};
use regex::Regex;

/// Extract the literal inside the `define( … )` wrapper.
pub fn extract_define_payload(js: &str) -> Result<String> {
    let wrapper = Regex::new(r"(?s)define\((.*)\)\s*;?\s*$")?;
    let captures = wrapper
        .captures(js)
        .context("could not find define( wrapper - site format changed")?;
    Ok(captures[1].trim().to_string())
}

/// Quote bare identifier keys so the payload becomes valid JSON.
///
/// Two passes: keys after `{`/`,`, then keys after `[`/`,` one nesting level
/// down. That is as deep as the upstream format goes.
pub fn quote_bare_keys(payload: &str) -> Result<String> {
    let object_keys = Regex::new(r"([{,])\s*(\w+)\s*:")?;
    let pass_one = object_keys.replace_all(payload, "${1}\"${2}\":");
    let array_keys = Regex::new(r"([\[,])\s*(\w+)\s*:")?;
    let pass_two = array_keys.replace_all(&pass_one, "${1}\"${2}\":");
    Ok(pass_two.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_payload() {
        let js = "define({data:[1,2,3]});";
        assert_eq!(extract_define_payload(js).unwrap(), "{data:[1,2,3]}");
    }

    #[test]
    fn test_extract_payload_without_semicolon() {
        let js = "define({data:[]})\n";
        assert_eq!(extract_define_payload(js).unwrap(), "{data:[]}");
    }

    #[test]
    fn test_extract_payload_spans_newlines() {
        let js = "define({\n  data: [\n    1\n  ]\n});";
        assert!(extract_define_payload(js).unwrap().starts_with('{'));
    }

    #[test]
    fn test_extract_rejects_unexpected_format() {
        let err = extract_define_payload("window.data = [1,2,3];").unwrap_err();
        assert!(err.to_string().contains("site format changed"));
    }

    #[test]
    fn test_quote_bare_keys() {
        // The quoting passes also swallow whitespace before a bare key.
        let quoted = quote_bare_keys("{data:[{code:\"CS100\", n:1}]}").unwrap();
        assert_eq!(quoted, "{\"data\":[{\"code\":\"CS100\",\"n\":1}]}");
    }

    #[test]
    fn test_quote_leaves_quoted_keys_alone() {
        let quoted = quote_bare_keys("{\"data\": 1}").unwrap();
        assert_eq!(quoted, "{\"data\": 1}");
    }

    #[test]
    fn test_decoded_payload_parses_as_json() {
        let js = "define({data:[[\"CS100\",0,0,[\"CS100\",\"002\",12345,3,\"Staff\",0,\"Intro\",[[2,32400,36900,\"KUPF 117\"]]]]]});";
        let payload = extract_define_payload(js).unwrap();
        let quoted = quote_bare_keys(&payload).unwrap();
        let value: serde_json::Value = serde_json::from_str(&quoted).unwrap();
        assert!(value.get("data").is_some());
    }
}
