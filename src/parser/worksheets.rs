use std::collections::HashMap;

use crate::model::{Question, QuestionType, Worksheet};

use super::rows::RawRow;

/// Placeholder for worksheets whose title row never arrived.
const UNTITLED: &str = "Bài tập không tên";

/// The four fixed answer columns, in display order.
const OPTION_FIELDS: &[&str] = &["dap_an_a", "dap_an_b", "dap_an_c", "dap_an_d"];

/// Aggregate flat worksheet-sheet rows into grouped worksheets.
///
/// Rows sharing a grouping key fold into one worksheet; first-seen key
/// order decides the output order. A row with a key but no question text
/// contributes worksheet metadata only, which lets a sheet carry a
/// title-bearing header row per worksheet. Single linear pass.
pub fn group(rows: &[RawRow]) -> Vec<Worksheet> {
    let mut worksheets: Vec<Worksheet> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let id = row.get_any(&["id_bai_tap", "id"]);
        if id.is_empty() {
            // No grouping key: nothing to attach the row to.
            continue;
        }

        let slot = *index.entry(id.to_string()).or_insert_with(|| {
            let title = row.get_any(&["tieu_de_bai_tap", "title"]);
            worksheets.push(Worksheet {
                id: id.to_string(),
                title: if title.is_empty() {
                    UNTITLED.to_string()
                } else {
                    title.to_string()
                },
                questions: Vec::new(),
            });
            worksheets.len() - 1
        });

        let text = row.get("cau_hoi");
        if text.is_empty() {
            continue;
        }

        let question_type = if row.get("loai_cau_hoi").eq_ignore_ascii_case("text") {
            QuestionType::Text
        } else {
            QuestionType::MultipleChoice
        };

        let options = match question_type {
            QuestionType::MultipleChoice => Some(
                OPTION_FIELDS
                    .iter()
                    .map(|f| row.get(f))
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            QuestionType::Text => None,
        };

        worksheets[slot].questions.push(Question {
            // Row position keeps ids unique even when a key reappears on
            // disjoint rows.
            id: format!("q-{}-{}", id, row.line),
            text: text.to_string(),
            question_type,
            options,
            correct_answer: row.get("dap_an_dung").to_string(),
            explanation: row.get("giai_thich").to_string(),
        });
    }

    worksheets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: usize, pairs: &[(&str, &str)]) -> RawRow {
        RawRow::from_pairs(line, pairs)
    }

    #[test]
    fn rows_sharing_a_key_fold_into_one_worksheet() {
        let rows = vec![
            row(1, &[("id_bai_tap", "ws1"), ("tieu_de_bai_tap", "Ôn tập Ngữ pháp")]),
            row(2, &[("id_bai_tap", "ws1"), ("cau_hoi", "Câu 1?"), ("dap_an_dung", "A")]),
            row(3, &[("id_bai_tap", "ws1"), ("cau_hoi", "Câu 2?"), ("dap_an_dung", "B")]),
        ];
        let sheets = group(&rows);
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].id, "ws1");
        assert_eq!(sheets[0].title, "Ôn tập Ngữ pháp");
        assert_eq!(sheets[0].questions.len(), 2);
        assert_eq!(sheets[0].questions[0].text, "Câu 1?");
        assert_eq!(sheets[0].questions[1].text, "Câu 2?");
    }

    #[test]
    fn rows_without_a_key_are_skipped() {
        let rows = vec![
            row(1, &[("cau_hoi", "Trôi nổi?")]),
            row(2, &[("id_bai_tap", "ws1"), ("cau_hoi", "Câu 1?")]),
        ];
        let sheets = group(&rows);
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].questions.len(), 1);
    }

    #[test]
    fn id_falls_back_to_plain_id_column() {
        let rows = vec![row(1, &[("id", "ws9"), ("cau_hoi", "Câu?")])];
        let sheets = group(&rows);
        assert_eq!(sheets[0].id, "ws9");
    }

    #[test]
    fn missing_title_uses_placeholder() {
        let rows = vec![row(1, &[("id_bai_tap", "ws1"), ("cau_hoi", "Câu?")])];
        assert_eq!(group(&rows)[0].title, UNTITLED);
    }

    #[test]
    fn title_resolves_on_first_seen_row_only() {
        let rows = vec![
            row(1, &[("id_bai_tap", "ws1"), ("cau_hoi", "Câu 1?")]),
            row(2, &[("id_bai_tap", "ws1"), ("tieu_de_bai_tap", "Muộn màng")]),
        ];
        assert_eq!(group(&rows)[0].title, UNTITLED);
    }

    #[test]
    fn type_defaults_to_multiple_choice() {
        let rows = vec![row(1, &[("id_bai_tap", "w"), ("cau_hoi", "?")])];
        let q = &group(&rows)[0].questions[0];
        assert_eq!(q.question_type, QuestionType::MultipleChoice);
        assert_eq!(q.options.as_deref(), Some(&[][..]));
    }

    #[test]
    fn text_type_matches_case_insensitively_and_has_no_options() {
        let rows = vec![row(
            1,
            &[
                ("id_bai_tap", "w"),
                ("cau_hoi", "Điền vào chỗ trống?"),
                ("loai_cau_hoi", "Text"),
                ("dap_an_a", "bị bỏ qua"),
            ],
        )];
        let q = &group(&rows)[0].questions[0];
        assert_eq!(q.question_type, QuestionType::Text);
        assert!(q.options.is_none());
    }

    #[test]
    fn blank_options_are_skipped_in_fixed_order() {
        let rows = vec![row(
            1,
            &[
                ("id_bai_tap", "w"),
                ("cau_hoi", "?"),
                ("dap_an_a", "X"),
                ("dap_an_b", ""),
                ("dap_an_c", "Y"),
                ("dap_an_d", "Z"),
            ],
        )];
        let q = &group(&rows)[0].questions[0];
        assert_eq!(q.options.as_deref(), Some(&["X".to_string(), "Y".into(), "Z".into()][..]));
    }

    #[test]
    fn question_ids_stay_unique_across_disjoint_rows() {
        let rows = vec![
            row(1, &[("id_bai_tap", "w"), ("cau_hoi", "a?")]),
            row(2, &[("id_bai_tap", "khác"), ("cau_hoi", "b?")]),
            row(3, &[("id_bai_tap", "w"), ("cau_hoi", "c?")]),
        ];
        let sheets = group(&rows);
        assert_eq!(sheets.len(), 2);
        let w = &sheets[0];
        assert_eq!(w.questions[0].id, "q-w-1");
        assert_eq!(w.questions[1].id, "q-w-3");
    }

    #[test]
    fn output_order_follows_first_appearance() {
        let rows = vec![
            row(1, &[("id_bai_tap", "b"), ("cau_hoi", "?")]),
            row(2, &[("id_bai_tap", "a"), ("cau_hoi", "?")]),
            row(3, &[("id_bai_tap", "b"), ("cau_hoi", "?")]),
        ];
        let sheets = group(&rows);
        let ids: Vec<&str> = sheets.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn correct_answer_and_explanation_default_to_empty() {
        let rows = vec![row(1, &[("id_bai_tap", "w"), ("cau_hoi", "?")])];
        let q = &group(&rows)[0].questions[0];
        assert_eq!(q.correct_answer, "");
        assert_eq!(q.explanation, "");
    }
}
