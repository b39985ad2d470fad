//! Catalog loading and selector derivation

use crate::model::{Card, GameEntry};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The catalog file structure
#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub games: Vec<GameEntry>,
}

/// Load and parse a catalog JSON file into cards
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Card>, String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {}", path.display(), e))?;

    let catalog: Catalog = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse catalog {}: {}", path.display(), e))?;

    Ok(into_cards(catalog.games))
}

/// Number the entries in catalog order
pub fn into_cards(entries: Vec<GameEntry>) -> Vec<Card> {
    entries
        .into_iter()
        .enumerate()
        .map(|(id, entry)| Card::from_entry(id, entry))
        .collect()
}

/// Distinct `(category, label)` pairs in first-appearance order
pub fn categories(cards: &[Card]) -> Vec<(String, String)> {
    let mut seen: Vec<(String, String)> = Vec::new();
    for card in cards {
        if !seen.iter().any(|(category, _)| *category == card.category) {
            seen.push((card.category.clone(), card.category_label.clone()));
        }
    }
    seen
}

/// Sample catalog used when no catalog file is configured
pub fn builtin_catalog() -> Vec<Card> {
    let games: [(&str, &str, &str, f32, &str); 12] = [
        ("Chess Masters", "board", "Board Games", 4.8, "15.2k players"),
        ("Backgammon Classic", "board", "Board Games", 4.3, "6.1k players"),
        ("Texas Poker", "card", "Card Games", 4.6, "22.4k players"),
        ("Solitaire Deluxe", "card", "Card Games", 4.1, "9.8k players"),
        ("Block Puzzle", "puzzle", "Puzzle", 4.5, "31.0k players"),
        ("Sudoku Daily", "puzzle", "Puzzle", 4.4, "12.7k players"),
        ("Space Raiders", "action", "Action", 4.7, "40.3k players"),
        ("Ninja Run", "action", "Action", 4.2, "18.9k players"),
        ("Street Racer", "racing", "Racing", 4.0, "11.5k players"),
        ("Drift King", "racing", "Racing", 3.9, "7.2k players"),
        ("Word Hunt", "word", "Word Games", 4.3, "8.4k players"),
        ("Crossword Pro", "word", "Word Games", 4.6, "5.6k players"),
    ];

    into_cards(
        games
            .into_iter()
            .map(|(title, category, label, rating, stats)| GameEntry {
                title: title.to_string(),
                category: category.to_string(),
                category_label: Some(label.to_string()),
                rating,
                stats: stats.to_string(),
            })
            .collect(),
    )
}
