use serde::{Deserialize, Serialize, Serializer};

/// Primitive type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Integer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub description: String,
}

/// Advertised parameter list of a tool; every listed parameter is required.
/// Serialized as a JSON Schema object; argument checking happens in the
/// typed decode, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    params: Vec<ParamSpec>,
}

impl InputSchema {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &str, kind: ParamKind, description: &str) -> Self {
        self.params.push(ParamSpec {
            name: name.to_string(),
            kind,
            description: description.to_string(),
        });
        self
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn required_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        for param in &self.params {
            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": param.kind,
                    "description": param.description,
                }),
            );
        }
        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": self.required_names(),
        })
    }
}

impl Serialize for InputSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
