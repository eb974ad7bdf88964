//! Overlay and HUD text
//!
//! The page around the game is bilingual, so the start and game-over
//! overlays follow the page language.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    /// From a BCP 47 tag such as `pt-BR` or `en`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim().to_lowercase();
        match primary.as_str() {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }
}

pub const GAME_TITLE: &str = "RIDE OR DIE";
pub const GAME_OVER_TITLE: &str = "GAME OVER";

pub fn start_hint(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "Pressione ESPAÇO para pular os obstáculos.",
        Language::En => "Press SPACE to jump over obstacles.",
    }
}

pub fn retry_prompt(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "Pressione Espaço para Tentar Novamente",
        Language::En => "Press Space to Try Again",
    }
}

pub fn new_record(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "Novo recorde!",
        Language::En => "New high score!",
    }
}

/// HUD score line
pub fn score_line(score: u32) -> String {
    format!("Score: {}", score)
}

/// HUD high score line
pub fn high_score_line(high_score: u32) -> String {
    format!("HI: {}", high_score)
}

/// Markup for the start overlay
pub fn start_overlay_html(lang: Language) -> String {
    format!("<h3>{}</h3><p class=\"blink\">{}</p>", GAME_TITLE, start_hint(lang))
}

/// Markup for the game-over overlay
pub fn game_over_html(lang: Language, score: u32, new_high_score: bool) -> String {
    let record = if new_high_score {
        format!("<p>{}</p>", new_record(lang))
    } else {
        String::new()
    };
    format!(
        "<h3>{}</h3><p>{}</p>{}<p class=\"blink\">{}</p>",
        GAME_OVER_TITLE,
        score_line(score),
        record,
        retry_prompt(lang)
    )
}
