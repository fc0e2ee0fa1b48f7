use crate::dto::scoring::{SubEventResult, SubEventScores};

/// One line of a student's score table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    /// Round label, only on the first row of each round
    pub round_label: Option<String>,
    pub category: String,
    pub score: String,
}

/// Renders a score without a trailing ".0" for whole numbers.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        score.to_string()
    }
}

pub fn score_rows(scores: &SubEventScores) -> Vec<ScoreRow> {
    scores
        .rounds
        .iter()
        .flat_map(|round| {
            let label = round
                .round_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| round.round_id.clone());
            round
                .scores
                .iter()
                .enumerate()
                .map(move |(i, (category, score))| ScoreRow {
                    round_label: (i == 0).then(|| label.clone()),
                    category: category.clone(),
                    score: format_score(*score),
                })
        })
        .collect()
}

pub fn total_label(total: Option<f64>) -> String {
    match total {
        Some(total) if total != 0.0 => format_score(total),
        _ => "N/A".to_string(),
    }
}

/// A results table line.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub rank: usize,
    pub participant_id: String,
    pub name: String,
    pub total: String,
}

/// Numbers results in the order the backend returned them.
pub fn ranked_results(results: Vec<SubEventResult>) -> Vec<RankedResult> {
    results
        .into_iter()
        .enumerate()
        .map(|(i, result)| {
            let participant = result.participant;
            let name = participant
                .name
                .filter(|name| !name.is_empty())
                .or(participant.username)
                .unwrap_or_default();
            RankedResult {
                rank: i + 1,
                participant_id: participant.id,
                name,
                total: format_score(result.total),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn rows_label_only_first_line_of_each_round() {
        let scores: SubEventScores = serde_json::from_str(
            r#"{"subEventId":"s1","totalScore":42,"rounds":[
                {"roundId":"r1","roundName":"Prelims","scores":{"Technical":8,"Design":7.5}},
                {"roundId":"r2","scores":{"Speed":9}}
            ]}"#,
        )
        .unwrap();
        let rows = score_rows(&scores);
        let labels: Vec<Option<&str>> = rows.iter().map(|r| r.round_label.as_deref()).collect();
        assert_eq!(labels, vec![Some("Prelims"), None, Some("r2")]);
        // categories come out sorted
        assert_eq!(rows[0].category, "Design");
        assert_eq!(rows[0].score, "7.5");
        assert_eq!(rows[1].score, "8");
    }

    #[test_case(None, "N/A")]
    #[test_case(Some(0.0), "N/A")]
    #[test_case(Some(42.0), "42")]
    #[test_case(Some(17.25), "17.25")]
    fn total_labels(total: Option<f64>, expected: &str) {
        assert_eq!(total_label(total), expected);
    }

    #[test]
    fn results_are_ranked_in_order() {
        let results: Vec<SubEventResult> = serde_json::from_str(
            r#"[{"participant":{"_id":"u1","name":"Asha Rao","username":"asha"},"total":91},
                {"participant":{"_id":"u2","username":"ravi"},"total":88.5}]"#,
        )
        .unwrap();
        let ranked = ranked_results(results);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].name, "Asha Rao");
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[1].name, "ravi");
        assert_eq!(ranked[1].total, "88.5");
    }
}
