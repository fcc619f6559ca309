#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDecision {
    pub index: u32,
    pub verdict: String,
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableCounts {
    pub quarantine: u32,
    pub reject: u32,
    pub secondary: u32,
    pub accept: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub as_of: String,
    pub decisions: Vec<RenderableDecision>,
    pub counts: RenderableCounts,
}
