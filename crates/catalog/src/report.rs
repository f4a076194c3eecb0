//! Plain-text preference summaries grouped by gift level.

use std::{collections::BTreeMap, fmt};

use shared::domain::GiftLevel;

use crate::{GiftLink, NpcView, PropView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// What an npc thinks of props.
    Npc,
    /// Which npcs care about a prop.
    Prop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub favor: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceReport {
    pub subject: String,
    pub perspective: Perspective,
    pub sections: BTreeMap<GiftLevel, Vec<ReportEntry>>,
}

impl PreferenceReport {
    pub fn for_npc(view: &NpcView<'_>) -> Self {
        Self::collect(view.npc.name.clone(), Perspective::Npc, view.links(), |link| {
            link.prop.prop_name.clone()
        })
    }

    pub fn for_prop(view: &PropView<'_>) -> Self {
        Self::collect(
            view.prop.prop_name.clone(),
            Perspective::Prop,
            view.links(),
            |link| link.npc.name.clone(),
        )
    }

    fn collect<'a>(
        subject: String,
        perspective: Perspective,
        links: impl Iterator<Item = GiftLink<'a>>,
        name_of: impl Fn(&GiftLink<'a>) -> String,
    ) -> Self {
        let mut sections: BTreeMap<GiftLevel, Vec<ReportEntry>> = [
            GiftLevel::Love,
            GiftLevel::Like,
            GiftLevel::Dislike,
            GiftLevel::Hate,
        ]
        .into_iter()
        .map(|level| (level, Vec::new()))
        .collect();

        for link in links {
            sections
                .entry(link.gift.level())
                .or_default()
                .push(ReportEntry {
                    name: name_of(&link),
                    favor: link.gift.favor,
                });
        }
        for entries in sections.values_mut() {
            entries.sort_by(|a, b| b.favor.cmp(&a.favor));
        }

        Self {
            subject,
            perspective,
            sections,
        }
    }

    pub fn entries(&self, level: &GiftLevel) -> &[ReportEntry] {
        self.sections.get(level).map(Vec::as_slice).unwrap_or_default()
    }
}

fn heading(level: &GiftLevel, perspective: Perspective) -> String {
    let label = match (level, perspective) {
        (GiftLevel::Love, Perspective::Npc) => "Loves",
        (GiftLevel::Like, Perspective::Npc) => "Likes",
        (GiftLevel::Dislike, Perspective::Npc) => "Dislikes",
        (GiftLevel::Hate, Perspective::Npc) => "Hates",
        (GiftLevel::Love, Perspective::Prop) => "Loved by",
        (GiftLevel::Like, Perspective::Prop) => "Liked by",
        (GiftLevel::Dislike, Perspective::Prop) => "Disliked by",
        (GiftLevel::Hate, Perspective::Prop) => "Hated by",
        (GiftLevel::Other(tag), _) => return format!("Other ({tag})"),
    };
    label.to_string()
}

impl fmt::Display for PreferenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.subject)?;
        for (level, entries) in &self.sections {
            if matches!(level, GiftLevel::Other(_)) && entries.is_empty() {
                continue;
            }
            let listed = entries
                .iter()
                .map(|entry| format!("{} ({})", entry.name, entry.favor))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "{}: [{listed}]", heading(level, self.perspective))?;
        }
        Ok(())
    }
}
