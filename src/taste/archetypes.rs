//! Personality archetypes and their greedy unique assignment.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::tally::Tally;

/// Points per matching (affinity, genre) pair, per unit of genre count.
const MATCH_WEIGHT: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    pub emoji: &'static str,
    pub genres: &'static [&'static str],
}

/// Assigned to everyone once the pool is exhausted.
pub const FALLBACK_ARCHETYPE: Archetype = Archetype {
    name: "The Music Lover",
    emoji: "🎶",
    genres: &[],
};

/// The fixed pool, in tie-breaking order.
pub const ARCHETYPES: &[Archetype] = &[
    Archetype { name: "The Indie Purist", emoji: "🎸", genres: &["indie rock", "indie folk", "alternative", "garage rock"] },
    Archetype { name: "The Night Owl", emoji: "🌙", genres: &["electronic", "house", "techno", "dance", "uk garage"] },
    Archetype { name: "The Beats Enthusiast", emoji: "🎤", genres: &["hip-hop", "rap", "grime", "uk hip-hop"] },
    Archetype { name: "The Classic Rocker", emoji: "🤘", genres: &["rock", "hard rock", "classic rock", "blues rock"] },
    Archetype { name: "The Smooth Operator", emoji: "🎷", genres: &["jazz", "soul", "r&b", "neo-soul"] },
    Archetype { name: "The Chill Viber", emoji: "🌴", genres: &["reggae", "ska", "dub", "dancehall"] },
    Archetype { name: "The Rebel", emoji: "⚡", genres: &["punk rock", "post-punk", "hardcore punk", "emo"] },
    Archetype { name: "The Storyteller", emoji: "📖", genres: &["folk", "singer-songwriter", "americana", "country"] },
    Archetype { name: "The Crowd Pleaser", emoji: "✨", genres: &["pop", "dance pop", "synth-pop"] },
    Archetype { name: "The Deep Thinker", emoji: "🌀", genres: &["progressive rock", "art rock", "psychedelic rock"] },
    Archetype { name: "The Sensitive Soul", emoji: "🍂", genres: &["indie folk", "dream pop", "slowcore", "shoegaze"] },
    Archetype { name: "The Eclectic Tastemaker", emoji: "🎭", genres: &["art pop", "experimental", "avant-garde"] },
    Archetype { name: "The Nostalgia Hunter", emoji: "📼", genres: &["new wave", "synth-pop", "80s", "disco"] },
    Archetype { name: "The World Traveler", emoji: "🌍", genres: &["afrobeat", "mpb", "tropicália", "world", "latin"] },
    Archetype { name: "The Underground Explorer", emoji: "🔦", genres: &["idm", "ambient", "experimental", "hyperpop"] },
    Archetype { name: "The Dancefloor General", emoji: "🪩", genres: &["disco", "funk", "dance", "house"] },
    Archetype { name: "The Vinyl Collector", emoji: "💿", genres: &["soul", "funk", "jazz", "classic rock"] },
    Archetype { name: "The Festival Goer", emoji: "🎪", genres: &["indie rock", "electronic", "alternative"] },
    Archetype { name: "The Bedroom DJ", emoji: "🎚️", genres: &["electronic", "drum and bass", "jungle", "uk bass"] },
    Archetype { name: "The Melancholy Romantic", emoji: "🥀", genres: &["dream pop", "shoegaze", "post-rock", "gothic rock"] },
    Archetype { name: "The Celtic Soul", emoji: "☘️", genres: &["irish trad", "folk", "celtic", "folk punk"] },
    Archetype { name: "The Headphone Hermit", emoji: "🎧", genres: &["ambient", "post-rock", "electronic", "idm"] },
    Archetype { name: "The Singalong Champion", emoji: "🎵", genres: &["pop rock", "britpop", "power pop", "indie pop"] },
    Archetype { name: "The Riff Master", emoji: "🔥", genres: &["heavy metal", "hard rock", "alternative metal", "nu metal"] },
    Archetype { name: "The Groove Seeker", emoji: "🕺", genres: &["funk", "disco", "r&b", "soul"] },
    Archetype { name: "The Genre Bender", emoji: "🔀", genres: &["alternative", "experimental", "art rock"] },
    Archetype { name: "The Sunset Chaser", emoji: "🌅", genres: &["indie pop", "dream pop", "chillwave"] },
    Archetype { name: "The Late Night Philosopher", emoji: "🌃", genres: &["post-punk", "gothic rock", "darkwave"] },
];

/// Score an archetype against a genre histogram.
///
/// Every (affinity, genre) pair where either lowercase string contains the
/// other adds `count × 10`.
pub fn score<'g>(archetype: &Archetype, histogram: impl IntoIterator<Item = (&'g str, usize)>) -> u64 {
    // Case-folded genres; a later duplicate overwrites the count in place
    let mut counts: Tally<String, usize> = Tally::new();
    for (genre, count) in histogram {
        counts.set(genre.to_lowercase(), count);
    }

    let mut total = 0;
    for target in archetype.genres {
        for (genre, &count) in counts.iter() {
            if genre.contains(target) || target.contains(genre.as_str()) {
                total += count as u64 * MATCH_WEIGHT;
            }
        }
    }
    total
}

/// One competitor's input to the assignment: id plus genre histogram.
#[derive(Debug, Clone)]
pub struct Candidate<'k> {
    pub id: &'k str,
    pub histogram: Vec<(&'k str, usize)>,
}

/// Greedily give each candidate a distinct archetype.
///
/// Candidates with the strongest best match pick first, each taking its
/// highest-scoring archetype not yet in `claimed`. Ties keep pool order and
/// candidate order. Once the pool runs out, the remaining candidates all get
/// [`FALLBACK_ARCHETYPE`].
pub fn assign_archetypes<'k>(
    candidates: &[Candidate<'k>],
    claimed: &mut HashSet<&'static str>,
) -> HashMap<&'k str, &'static Archetype> {
    let mut scored: Vec<(&Candidate<'k>, Vec<(&'static Archetype, u64)>)> = candidates
        .iter()
        .map(|c| {
            let mut prefs: Vec<(&'static Archetype, u64)> = ARCHETYPES
                .iter()
                .map(|a| (a, score(a, c.histogram.iter().copied())))
                .collect();
            prefs.sort_by(|x, y| y.1.cmp(&x.1));
            (c, prefs)
        })
        .collect();

    let best = |prefs: &[(&'static Archetype, u64)]| prefs.first().map(|p| p.1).unwrap_or(0);
    scored.sort_by(|x, y| best(&y.1).cmp(&best(&x.1)));

    let mut assignments = HashMap::with_capacity(candidates.len());
    for (candidate, prefs) in &scored {
        let preferred = prefs
            .iter()
            .map(|(a, _)| *a)
            .find(|a| !claimed.contains(a.name));
        let chosen = preferred.or_else(|| ARCHETYPES.iter().find(|a| !claimed.contains(a.name)));

        let archetype = match chosen {
            Some(a) => {
                claimed.insert(a.name);
                a
            }
            None => &FALLBACK_ARCHETYPE,
        };
        log::trace!("{} → {}", candidate.id, archetype.name);
        assignments.insert(candidate.id, archetype);
    }
    assignments
}
