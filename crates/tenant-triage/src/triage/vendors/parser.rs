use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Vendor entry as written in a directory file, before category resolution.
#[derive(Debug, Deserialize)]
pub(crate) struct VendorRow {
    #[serde(default, deserialize_with = "trimmed")]
    pub(crate) id: String,
    #[serde(default, deserialize_with = "trimmed")]
    pub(crate) name: String,
    #[serde(deserialize_with = "trimmed")]
    pub(crate) category: String,
    #[serde(default, deserialize_with = "trimmed")]
    pub(crate) contact: String,
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<VendorRow>, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<VendorRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<VendorRow>().collect()
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_are_trimmed() {
        let data = "id,name,category,contact\n v-1 , Gulf Pipes ,Plumbing, +971 4 000 0000 \n";
        let rows = parse_csv(data.as_bytes()).expect("csv parses");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "v-1");
        assert_eq!(rows[0].name, "Gulf Pipes");
        assert_eq!(rows[0].category, "Plumbing");
        assert_eq!(rows[0].contact, "+971 4 000 0000");
    }

    #[test]
    fn json_contact_is_optional() {
        let data = r#"[{"id":"v-1","name":"Cool Breeze","category":"AC"}]"#;
        let rows = parse_json(data.as_bytes()).expect("json parses");

        assert_eq!(rows[0].contact, "");
    }

    #[test]
    fn json_requires_category() {
        let data = r#"[{"id":"v-1","name":"Cool Breeze"}]"#;
        assert!(parse_json(data.as_bytes()).is_err());
    }
}
