use serde::{Deserialize, Serialize};

/// Process attribute a filter inspects. Wire values are fixed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Name = 1,
    Path = 2,
    Description = 3,
    MainWindowTitle = 4,
}

impl FieldKind {
    pub fn wire_value(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Path => "Path",
            FieldKind::Description => "Description",
            FieldKind::MainWindowTitle => "Main Window Title",
        }
    }

    /// Field kinds the tracking engine can match on the current platform.
    /// Linux trackers expose no window metadata, so the set shrinks there.
    pub fn platform_default() -> Vec<FieldKind> {
        if cfg!(target_os = "linux") {
            vec![FieldKind::Name, FieldKind::Path]
        } else {
            vec![
                FieldKind::Name,
                FieldKind::Path,
                FieldKind::Description,
                FieldKind::MainWindowTitle,
            ]
        }
    }
}

/// How a filter compares its value against the inspected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    StartsWith = 1,
    EndsWith = 2,
    Contains = 3,
    Equals = 4,
}

impl MatchKind {
    pub const ALL: [MatchKind; 4] = [
        MatchKind::StartsWith,
        MatchKind::EndsWith,
        MatchKind::Contains,
        MatchKind::Equals,
    ];

    pub fn wire_value(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchKind::StartsWith => "Starts with",
            MatchKind::EndsWith => "Ends with",
            MatchKind::Contains => "Contains",
            MatchKind::Equals => "Equals",
        }
    }
}

/// A labeled tracked activity. The name is the primary key; there is no
/// surrogate id on the client side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub inactive: bool,
}

/// A rule narrowing which processes count toward a tag. The server reports
/// field and match kinds as display strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub id: i64,
    #[serde(rename = "filter")]
    pub field: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

/// One aggregated report line for a tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub name: String,
    pub total_active_time: String,
    #[serde(rename = "firstOccurence")]
    pub first_occurrence: String,
    #[serde(rename = "lastOccurence")]
    pub last_occurrence: String,
}

/// Uniform response body shared by every endpoint; sections the endpoint
/// does not use simply stay absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope {
    pub success: bool,
    pub message: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub tag: Option<Tag>,
    pub filters: Option<Vec<Filter>>,
    pub filter: Option<Filter>,
    pub report: Option<Vec<ReportRow>>,
    pub setting_value: Option<String>,
}
