use std::borrow::Cow;

use roster_core::{FieldValueMut, Record, Text};

/// Trim surrounding whitespace from every text field and every list element.
///
/// Idempotent: sanitizing an already sanitized record changes nothing.
pub fn sanitize_record<R: Record>(record: &mut R) {
    for value in record.values_mut() {
        match value {
            FieldValueMut::Scalar(text) => trim_text(text),
            FieldValueMut::ScalarList(list) => {
                if list.iter().any(|item| needs_trim(item)) {
                    list.to_mut().iter_mut().for_each(trim_text);
                }
            }
        }
    }
}

fn needs_trim(text: &str) -> bool {
    text.trim().len() != text.len()
}

fn trim_text(text: &mut Text) {
    if needs_trim(text) {
        *text = Cow::Owned(text.trim().to_string());
    }
}

#[cfg(test)]
mod tests {
    use roster_core::{TextList, list_values};
    use roster_model::Team;

    use super::*;

    fn team(name: &str, channel: &str, members: &[&str]) -> Team {
        Team {
            name: Text::Owned(name.to_string()),
            internal_slack_channel: Text::Owned(channel.to_string()),
            members: TextList::Owned(
                members
                    .iter()
                    .map(|member| Text::Owned(member.to_string()))
                    .collect(),
            ),
        }
    }

    #[test]
    fn trims_scalars_and_list_elements() {
        let mut record = team("  Platform Team  ", "\t#platform\n", &[" alice ", "bob "]);
        sanitize_record(&mut record);
        assert_eq!(record.name, "Platform Team");
        assert_eq!(record.internal_slack_channel, "#platform");
        assert_eq!(list_values(&record.members), vec!["alice", "bob"]);
    }

    #[test]
    fn sanitizing_twice_is_a_no_op() {
        let mut once = team(" a ", "b", &["  c", "d  ", ""]);
        sanitize_record(&mut once);
        let mut twice = once.clone();
        sanitize_record(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn keeps_inner_whitespace_and_order() {
        let mut record = team("Site  Reliability", "#sre", &["zed", " amy", "bob"]);
        sanitize_record(&mut record);
        assert_eq!(record.name, "Site  Reliability");
        assert_eq!(list_values(&record.members), vec!["zed", "amy", "bob"]);
    }

    #[test]
    fn trims_borrowed_text() {
        let mut text: Text = Cow::Borrowed("  x ");
        trim_text(&mut text);
        assert_eq!(text, "x");
    }
}
