//! Chapter/subchapter outline of the whitepaper.
//!
//! Numbers are assigned from list position when the outline is built, so they
//! are always unique, contiguous from 1 and in display order. A subchapter's
//! `full_number` ("2.3") is derived from its parent at the same time and is the
//! value sections compare against the scroll position.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::theme::Theme;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutlineError {
    #[error("anchor id `{0}` is used more than once")]
    DuplicateId(String),
    #[error("chapter {chapter} has an anchor with an empty id")]
    EmptyId { chapter: u32 },
}

/// Static description of a chapter, before numbering.
pub struct ChapterDraft {
    pub id: &'static str,
    pub title: &'static str,
    pub theme: Option<Theme>,
    pub rail_shows_first_subchapter: bool,
    pub subchapters: &'static [SubchapterDraft],
}

pub struct SubchapterDraft {
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chapter {
    pub id: &'static str,
    pub number: u32,
    pub title: &'static str,
    /// Fixed theme for everything inside this chapter, `None` inherits.
    pub theme: Option<Theme>,
    /// The navigation rail labels the chapter with its first subchapter while
    /// only the chapter anchor itself is active.
    pub rail_shows_first_subchapter: bool,
    pub subchapters: Vec<Subchapter>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Subchapter {
    pub id: &'static str,
    pub number: u32,
    pub title: &'static str,
    pub full_number: String,
}

impl Chapter {
    pub fn subchapter(&self, full_number: &str) -> Option<&Subchapter> {
        self.subchapters.iter().find(|s| s.full_number == full_number)
    }
}

/// What an anchor id points at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor<'a> {
    Chapter(&'a Chapter),
    Subchapter(&'a Chapter, &'a Subchapter),
}

impl<'a> Anchor<'a> {
    pub fn chapter(&self) -> &'a Chapter {
        match self {
            Anchor::Chapter(chapter) | Anchor::Subchapter(chapter, _) => chapter,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    chapter: usize,
    subchapter: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    chapters: Vec<Chapter>,
    index: HashMap<&'static str, Slot>,
}

impl Outline {
    pub fn new(drafts: &[ChapterDraft]) -> Result<Self, OutlineError> {
        let mut chapters = Vec::with_capacity(drafts.len());
        let mut index = HashMap::new();

        for (ci, draft) in drafts.iter().enumerate() {
            let number = ci as u32 + 1;
            register(&mut index, draft.id, number, Slot { chapter: ci, subchapter: None })?;

            let mut subchapters = Vec::with_capacity(draft.subchapters.len());
            for (si, sub) in draft.subchapters.iter().enumerate() {
                let sub_number = si as u32 + 1;
                register(&mut index, sub.id, number, Slot { chapter: ci, subchapter: Some(si) })?;
                subchapters.push(Subchapter {
                    id: sub.id,
                    number: sub_number,
                    title: sub.title,
                    full_number: format!("{}.{}", number, sub_number),
                });
            }

            chapters.push(Chapter {
                id: draft.id,
                number,
                title: draft.title,
                theme: draft.theme,
                rail_shows_first_subchapter: draft.rail_shows_first_subchapter,
                subchapters,
            });
        }

        Ok(Self { chapters, index })
    }

    /// The outline of the published whitepaper.
    pub fn whitepaper() -> &'static Outline {
        &WHITEPAPER
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        number
            .checked_sub(1)
            .and_then(|i| self.chapters.get(i as usize))
    }

    pub fn resolve(&self, anchor_id: &str) -> Option<Anchor<'_>> {
        let slot = self.index.get(anchor_id)?;
        let chapter = &self.chapters[slot.chapter];
        Some(match slot.subchapter {
            None => Anchor::Chapter(chapter),
            Some(si) => Anchor::Subchapter(chapter, &chapter.subchapters[si]),
        })
    }

    pub fn find_subchapter(&self, anchor_id: &str) -> Option<(&Chapter, &Subchapter)> {
        match self.resolve(anchor_id)? {
            Anchor::Subchapter(chapter, sub) => Some((chapter, sub)),
            Anchor::Chapter(_) => None,
        }
    }

    /// Every anchor id in document order: each chapter followed by its subchapters.
    pub fn anchor_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.chapters.iter().flat_map(|chapter| {
            std::iter::once(chapter.id).chain(chapter.subchapters.iter().map(|s| s.id))
        })
    }
}

fn register(
    index: &mut HashMap<&'static str, Slot>,
    id: &'static str,
    chapter: u32,
    slot: Slot,
) -> Result<(), OutlineError> {
    if id.is_empty() {
        return Err(OutlineError::EmptyId { chapter });
    }
    if index.insert(id, slot).is_some() {
        return Err(OutlineError::DuplicateId(id.to_string()));
    }
    Ok(())
}

const WHITEPAPER_DRAFT: &[ChapterDraft] = &[
    ChapterDraft {
        id: "chapter-1",
        title: "INTRODUCTION",
        theme: None,
        rail_shows_first_subchapter: false,
        subchapters: &[
            SubchapterDraft { id: "intro-1", title: "Current Mental Health Crisis" },
            SubchapterDraft { id: "intro-2", title: "Limitations of Traditional Screening Methods" },
            SubchapterDraft { id: "intro-3", title: "Objective" },
        ],
    },
    ChapterDraft {
        id: "chapter-2",
        title: "QUALITY AND MONITORING",
        theme: Some(Theme::Light),
        rail_shows_first_subchapter: true,
        subchapters: &[
            SubchapterDraft { id: "quality-1", title: "Audio Processing" },
            SubchapterDraft { id: "quality-2", title: "Visual Analysis" },
            SubchapterDraft { id: "quality-3", title: "Text Analysis" },
            SubchapterDraft { id: "quality-4", title: "Physiology Domain" },
            SubchapterDraft { id: "quality-5", title: "Behavior Domain" },
            SubchapterDraft { id: "quality-6", title: "Self-Report Domain" },
            SubchapterDraft { id: "quality-7", title: "Circuits Domain" },
        ],
    },
    ChapterDraft {
        id: "chapter-3",
        title: "PERFORMANCE",
        theme: None,
        rail_shows_first_subchapter: false,
        subchapters: &[
            SubchapterDraft { id: "performance-1", title: "Multi-LLM Architecture Design" },
            SubchapterDraft { id: "performance-2", title: "Advanced Feature Extraction" },
        ],
    },
    ChapterDraft {
        id: "chapter-4",
        title: "SUMMARY",
        theme: None,
        rail_shows_first_subchapter: false,
        subchapters: &[SubchapterDraft { id: "summary-1", title: "Benchmark Performance Analysis" }],
    },
    ChapterDraft {
        id: "chapter-5",
        title: "CONCLUSIONS",
        theme: Some(Theme::Dark),
        rail_shows_first_subchapter: false,
        subchapters: &[
            SubchapterDraft { id: "conclusions-1", title: "Conclusions" },
            SubchapterDraft { id: "conclusions-2", title: "Final Scientific Statement" },
        ],
    },
];

static WHITEPAPER: Lazy<Outline> = Lazy::new(|| match Outline::new(WHITEPAPER_DRAFT) {
    Ok(outline) => outline,
    Err(e) => {
        log::error!("Whitepaper outline rejected, tracking disabled: {}", e);
        Outline::default()
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitepaper_outline_builds() {
        assert!(Outline::new(WHITEPAPER_DRAFT).is_ok());
        let outline = Outline::whitepaper();
        let counts: Vec<usize> = outline.chapters().iter().map(|c| c.subchapters.len()).collect();
        assert_eq!(counts, vec![3, 7, 2, 1, 2]);
    }

    #[test]
    fn chapter_numbers_are_contiguous_from_one() {
        for (i, chapter) in Outline::whitepaper().chapters().iter().enumerate() {
            assert_eq!(chapter.number, i as u32 + 1);
            for (j, sub) in chapter.subchapters.iter().enumerate() {
                assert_eq!(sub.number, j as u32 + 1);
            }
        }
    }

    #[test]
    fn full_number_matches_parent_and_own_number() {
        for chapter in Outline::whitepaper().chapters() {
            for sub in &chapter.subchapters {
                assert_eq!(sub.full_number, format!("{}.{}", chapter.number, sub.number));
            }
        }
    }

    #[test]
    fn resolve_finds_chapters_and_subchapters() {
        let outline = Outline::whitepaper();

        match outline.resolve("chapter-3") {
            Some(Anchor::Chapter(chapter)) => assert_eq!(chapter.number, 3),
            other => panic!("unexpected {:?}", other),
        }
        match outline.resolve("quality-4") {
            Some(Anchor::Subchapter(chapter, sub)) => {
                assert_eq!(chapter.number, 2);
                assert_eq!(sub.full_number, "2.4");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(outline.resolve("quality-4").map(|a| a.chapter().number), Some(2));
        assert_eq!(outline.resolve("chapter-5").map(|a| a.chapter().number), Some(5));
        assert!(outline.resolve("first-section").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected_across_chapters() {
        const DRAFT: &[ChapterDraft] = &[
            ChapterDraft {
                id: "a",
                title: "A",
                theme: None,
                rail_shows_first_subchapter: false,
                subchapters: &[SubchapterDraft { id: "shared", title: "one" }],
            },
            ChapterDraft {
                id: "b",
                title: "B",
                theme: None,
                rail_shows_first_subchapter: false,
                subchapters: &[SubchapterDraft { id: "shared", title: "two" }],
            },
        ];
        assert_eq!(
            Outline::new(DRAFT).unwrap_err(),
            OutlineError::DuplicateId("shared".to_string())
        );
    }

    #[test]
    fn empty_id_is_rejected() {
        const DRAFT: &[ChapterDraft] = &[ChapterDraft {
            id: "a",
            title: "A",
            theme: None,
            rail_shows_first_subchapter: false,
            subchapters: &[SubchapterDraft { id: "", title: "nameless" }],
        }];
        assert_eq!(Outline::new(DRAFT).unwrap_err(), OutlineError::EmptyId { chapter: 1 });
    }

    #[test]
    fn anchor_ids_follow_document_order() {
        let ids: Vec<_> = Outline::whitepaper().anchor_ids().take(5).collect();
        assert_eq!(ids, vec!["chapter-1", "intro-1", "intro-2", "intro-3", "chapter-2"]);
        assert_eq!(Outline::whitepaper().anchor_ids().count(), 5 + 15);
    }

    #[test]
    fn chapter_lookup_by_number() {
        let outline = Outline::whitepaper();
        assert_eq!(outline.chapter(5).map(|c| c.id), Some("chapter-5"));
        assert!(outline.chapter(0).is_none());
        assert!(outline.chapter(6).is_none());
    }
}
