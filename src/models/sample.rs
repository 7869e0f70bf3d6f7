use serde::Deserialize;

use crate::config::Config;

/// A submission matching a drill-down target
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampleRow {
    pub title: String,
    pub submission_date: String,
    #[serde(alias = "objectID", deserialize_with = "deserialize_object_id")]
    pub objectid: String,
}

impl SampleRow {
    /// Link to the submission on Hacker News
    pub fn item_url(&self) -> String {
        format!("{}{}", Config::ITEM_URL_BASE, self.objectid)
    }
}

/// Object ids come back either as strings or as integers depending on the column type
fn deserialize_object_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ObjectId {
        Text(String),
        Number(u64),
    }

    Ok(match ObjectId::deserialize(deserializer)? {
        ObjectId::Text(s) => s,
        ObjectId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_object_id() {
        let json = r#"{"title":"Show HN: a thing","submission_date":"2024-01-03","objectid":38852341}"#;
        let row: SampleRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.objectid, "38852341");
        assert_eq!(row.item_url(), "https://news.ycombinator.com/item?id=38852341");
    }

    #[test]
    fn test_camel_case_object_id_key() {
        let json = r#"{"title":"Ask HN: rust?","submission_date":"2024-01-04","objectID":"38860000"}"#;
        let row: SampleRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.objectid, "38860000");
    }
}
