// @generated by roster-gen from teams.yaml. Do not edit.

use std::borrow::Cow;

use roster_model::Team;

pub static TEAMS: &[Team] = &[
    Team {
        name: Cow::Borrowed("Platform Team"),
        internal_slack_channel: Cow::Borrowed("#platform"),
        members: Cow::Borrowed(&[Cow::Borrowed("alice"), Cow::Borrowed("bob")]),
    },
    Team {
        name: Cow::Borrowed("Site Reliability"),
        internal_slack_channel: Cow::Borrowed("#sre"),
        members: Cow::Borrowed(&[Cow::Borrowed("carol"), Cow::Borrowed("dave"), Cow::Borrowed("alice")]),
    },
    Team {
        name: Cow::Borrowed("Developer Experience"),
        internal_slack_channel: Cow::Borrowed("#devex"),
        members: Cow::Borrowed(&[Cow::Borrowed("erin")]),
    },
    Team {
        name: Cow::Borrowed("Build \\ Release"),
        internal_slack_channel: Cow::Borrowed("#build\trelease"),
        members: Cow::Borrowed(&[Cow::Borrowed("frank\nmiller"), Cow::Borrowed("grace\u{7}"), Cow::Borrowed("heidi\u{202e}oknl"), Cow::Borrowed("ivan\0")]),
    },
];
