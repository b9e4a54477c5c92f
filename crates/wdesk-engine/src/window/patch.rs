use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};

/// Sparse update applied to a window record by the store
///
/// Absent fields are left untouched. The JSON form is camelCase with absent
/// fields omitted, e.g. `{"x":150,"y":150}`, which is what the dashboard
/// store's `updateWidget(id, patch)` expects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flipped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparency: Option<f32>,
    /// `Some(None)` clears the custom title (serialized as `null`)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "double_option"
    )]
    pub custom_title: Option<Option<String>>,
}

impl WindowPatch {
    /// Position-only patch
    pub fn position(pos: Vec2) -> Self {
        Self {
            x: Some(pos.x),
            y: Some(pos.y),
            ..Default::default()
        }
    }

    /// Size-only patch
    pub fn size(size: Size) -> Self {
        Self {
            w: Some(size.width),
            h: Some(size.height),
            ..Default::default()
        }
    }

    /// Position and size patch
    pub fn geometry(rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            w: Some(rect.width),
            h: Some(rect.height),
            ..Default::default()
        }
    }

    pub fn flipped(flipped: bool) -> Self {
        Self {
            flipped: Some(flipped),
            ..Default::default()
        }
    }

    pub fn maximized(maximized: bool) -> Self {
        Self {
            maximized: Some(maximized),
            ..Default::default()
        }
    }

    pub fn minimized(minimized: bool) -> Self {
        Self {
            minimized: Some(minimized),
            ..Default::default()
        }
    }

    pub fn z(z: i32) -> Self {
        Self {
            z: Some(z),
            ..Default::default()
        }
    }

    /// Patch written by the two-finger swipe
    pub fn swipe_minimize() -> Self {
        Self {
            minimized: Some(true),
            flipped: Some(false),
            ..Default::default()
        }
    }

    pub fn custom_title(title: Option<String>) -> Self {
        Self {
            custom_title: Some(title),
            ..Default::default()
        }
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Serialize to the sparse JSON form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Distinguishes an absent field from an explicit `null`
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Option<String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_patch_json_is_sparse() {
        let patch = WindowPatch::position(Vec2::new(150.0, 150.0));
        assert_eq!(patch.to_json().unwrap(), r#"{"x":150.0,"y":150.0}"#);
    }

    #[test]
    fn test_swipe_patch_clears_flip() {
        let patch = WindowPatch::swipe_minimize();
        assert_eq!(patch.minimized, Some(true));
        assert_eq!(patch.flipped, Some(false));
        assert_eq!(
            patch.to_json().unwrap(),
            r#"{"flipped":false,"minimized":true}"#
        );
    }

    #[test]
    fn test_custom_title_null_clears() {
        let patch = WindowPatch::custom_title(None);
        assert_eq!(patch.to_json().unwrap(), r#"{"customTitle":null}"#);

        let parsed: WindowPatch = serde_json::from_str(r#"{"customTitle":null}"#).unwrap();
        assert_eq!(parsed.custom_title, Some(None));

        let parsed: WindowPatch = serde_json::from_str(r#"{"x":1}"#).unwrap();
        assert_eq!(parsed.custom_title, None);
    }

    #[test]
    fn test_is_empty() {
        assert!(WindowPatch::default().is_empty());
        assert!(!WindowPatch::z(3).is_empty());
    }
}
