use serde::{Deserialize, Serialize};

/// # Summary
/// Options passed to `createChart`, serialised in the charting library's
/// camelCase shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub layout: LayoutOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub text_color: String,
    pub background: Background,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub color: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            layout: LayoutOptions {
                text_color: "#000".to_string(),
                background: Background {
                    color: "transparent".to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_shape() {
        let json = serde_json::to_string(&ChartOptions::default()).unwrap();
        assert_eq!(
            json,
            r##"{"layout":{"textColor":"#000","background":{"color":"transparent"}}}"##
        );
    }
}
