use serde::Serialize;

/// JSON response for `filegate check --json`.
#[derive(Serialize)]
pub struct CheckResponse {
    pub config: String,
    pub users: Vec<String>,
    pub download_roots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ami: Option<AmiSummary>,
}

#[derive(Serialize)]
pub struct AmiSummary {
    pub command: String,
    pub entries: usize,
}

/// JSON response for `filegate ami --json`.
#[derive(Serialize)]
pub struct AmiResponse {
    pub command: String,
    pub servers: Vec<AmiServerItem>,
}

#[derive(Serialize)]
pub struct AmiServerItem {
    pub id: String,
    pub name: String,
}

/// JSON response for `filegate verify --json`.
#[derive(Serialize)]
pub struct VerifyResponse {
    pub username: String,
    pub ip: String,
    pub logged_in_at: String,
    pub logged_out: bool,
}
