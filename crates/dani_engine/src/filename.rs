use dani_core::{DanRank, PlayStyle};

/// `{prefix}.{rank}.{SP|DP}.{page:03}.json`, unique per (rank, play style, page).
pub fn artifact_filename(prefix: &str, rank: &DanRank, play_style: PlayStyle, page: u32) -> String {
    format!(
        "{}.{}.{}.{page:03}.json",
        sanitize_component(prefix),
        sanitize_component(&rank.name),
        play_style.label()
    )
}

/// Rank names come from the service; keep them from escaping the output directory.
fn sanitize_component(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        return "_".to_string();
    }
    cleaned
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
