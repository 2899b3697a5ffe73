use brokeeats_shared::{Error, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Pantry names handed from the selection screen to the matcher.
///
/// Travels as a plain JSON array of strings, e.g. `["Eggs","Rice"]`.
#[derive(Validate, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PantryQuery {
    #[validate(length(min = 1, message = "Please select at least one ingredient"))]
    ingredients: Vec<String>,
}

impl PantryQuery {
    /// Trims names, drops blank ones and rejects an empty result.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ingredients = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>();

        let query = Self { ingredients };
        query.validate()?;

        Ok(query)
    }

    pub fn from_json(value: &str) -> Result<Self> {
        let names: Vec<String> = serde_json::from_str(value)?;

        Self::new(names)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Unknown(e.into()))
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_handoff_round_trip() {
        let query = PantryQuery::new(["Eggs", "Rice"]).unwrap();
        let json = query.to_json().unwrap();
        assert_eq!(json, r#"["Eggs","Rice"]"#);
        assert_eq!(PantryQuery::from_json(&json).unwrap(), query);
    }

    #[test]
    fn blank_names_are_dropped() {
        let query = PantryQuery::new(["  Eggs ", "", "   "]).unwrap();
        assert_eq!(query.ingredients(), ["Eggs".to_owned()]);
    }

    #[test]
    fn empty_selection_is_invalid() {
        assert!(PantryQuery::new(Vec::<String>::new()).unwrap_err().is_invalid_input());
        assert!(PantryQuery::from_json("[]").unwrap_err().is_invalid_input());
        assert!(PantryQuery::from_json("[\" \"]").unwrap_err().is_invalid_input());
    }

    #[test]
    fn malformed_json_is_invalid() {
        assert!(PantryQuery::from_json("Eggs,Rice").unwrap_err().is_invalid_input());
        assert!(PantryQuery::from_json("[1, 2]").unwrap_err().is_invalid_input());
    }
}
