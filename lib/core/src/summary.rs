use crate::Match;

/// Human-readable report of a match list, one numbered line per match.
pub fn match_summary(matches: &[Match<'_>]) -> String {
    if matches.is_empty() {
        return "No similar answers found.".to_string();
    }

    let mut summary = format!("Found {} similar answer(s):\n", matches.len());
    for (rank, m) in matches.iter().enumerate() {
        summary.push_str(&format!(
            "\n{}. [{}] {} (similarity: {:.2}%)",
            rank + 1,
            m.document.category,
            m.document.title,
            m.score * 100.0
        ));
    }
    summary
}
