//! Static phrase data shared by the classifier and responder.
//!
//! A `Lexicon` is built once at startup and never mutated afterwards.
//! Every list is ordered: earlier entries win when several match.

use serde::{Deserialize, Serialize};

use crate::kernel::dialogue::types::Intent;
use crate::kernel::emotion::types::EmotionLabel;

/// Placeholder replaced by the emotion label in the fallback reply.
pub const EMOTION_PLACEHOLDER: &str = "{emotion}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
}

/// Ordered trigger phrases per emotion.
pub type TriggerSet = Vec<(EmotionLabel, Vec<String>)>;

/// Fixed reply per (checked intent, emotion), plus the templated fallback for `Intent::Other`.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    rows: [[String; 4]; 4],
    fallback: String,
}

impl ResponseTable {
    /// `rows` is indexed by `Intent::CHECKED`, columns by `EmotionLabel::ALL`.
    pub fn new(rows: [[&str; 4]; 4], fallback: &str) -> Self {
        Self {
            rows: rows.map(|row| row.map(str::to_string)),
            fallback: fallback.to_string(),
        }
    }

    /// `None` for `Intent::Other`, which has no fixed row.
    pub fn lookup(&self, intent: Intent, emotion: EmotionLabel) -> Option<&str> {
        self.rows
            .get(intent.index())
            .map(|row| row[emotion.index()].as_str())
    }

    pub fn fallback(&self, emotion: EmotionLabel) -> String {
        self.fallback.replace(EMOTION_PLACEHOLDER, emotion.as_str())
    }
}

/// Display names used when rendering the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerLabels {
    pub user: String,
    pub avatar: String,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    pub language: Language,
    pub triggers: TriggerSet,
    pub intents: Vec<(Intent, Vec<String>)>,
    pub responses: ResponseTable,
    pub labels: SpeakerLabels,
    /// Fixed self-introduction, spoken on request without a turn
    pub introduction: String,
}

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

impl Lexicon {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Ja => Self::japanese(),
            Language::En => Self::english(),
        }
    }

    pub fn japanese() -> Self {
        Self {
            language: Language::Ja,
            triggers: vec![
                (EmotionLabel::Happy, phrases(&["嬉しい", "楽しい", "幸せ", "笑顔"])),
                (EmotionLabel::Sad, phrases(&["悲しい", "辛い", "寂しい", "泣く"])),
                (EmotionLabel::Angry, phrases(&["怒る", "腹立たしい", "イライラ", "不満"])),
                (EmotionLabel::Neutral, phrases(&["普通", "まあまあ", "特に"])),
            ],
            intents: vec![
                (Intent::Greeting, phrases(&["こんにちは", "はじめまして"])),
                (Intent::Farewell, phrases(&["さようなら", "バイバイ"])),
                (Intent::Thanks, phrases(&["ありがとう", "感謝"])),
                (Intent::Apology, phrases(&["ごめん", "すみません"])),
            ],
            responses: ResponseTable::new(
                [
                    [
                        "こんにちは！今日も元気そうですね！",
                        "こんにちは...大丈夫ですか？",
                        "こんにちは。落ち着いて話しましょう。",
                        "こんにちは。お話しましょう。",
                    ],
                    [
                        "さようなら！またお話しましょう！",
                        "さようなら...またお話しましょうね。",
                        "さようなら。また落ち着いた時に。",
                        "さようなら。またお話しましょう。",
                    ],
                    [
                        "どういたしまして！お役に立てて嬉しいです！",
                        "どういたしまして...また何かあったら言ってください。",
                        "どういたしまして。落ち着いてください。",
                        "どういたしまして。",
                    ],
                    [
                        "大丈夫ですよ！気にしないでください！",
                        "大丈夫です...気にしないでください。",
                        "大丈夫です。落ち着いてください。",
                        "大丈夫です。",
                    ],
                ],
                "なるほど、{emotion}な気持ちなのですね。",
            ),
            labels: SpeakerLabels {
                user: "あなた".to_string(),
                avatar: "仮想ヒューマン".to_string(),
            },
            introduction: "こんにちは、私は仮想デジタルヒューマンです。".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            language: Language::En,
            triggers: vec![
                (EmotionLabel::Happy, phrases(&["happy", "fun", "glad", "smile"])),
                (EmotionLabel::Sad, phrases(&["sad", "painful", "lonely", "cry"])),
                (EmotionLabel::Angry, phrases(&["angry", "furious", "annoyed", "frustrated"])),
                (EmotionLabel::Neutral, phrases(&["normal", "so-so", "nothing special"])),
            ],
            intents: vec![
                (Intent::Greeting, phrases(&["hello", "nice to meet you"])),
                (Intent::Farewell, phrases(&["goodbye", "bye"])),
                (Intent::Thanks, phrases(&["thank you", "thanks"])),
                (Intent::Apology, phrases(&["sorry", "excuse me"])),
            ],
            responses: ResponseTable::new(
                [
                    [
                        "Hello! You look cheerful today!",
                        "Hello... are you alright?",
                        "Hello. Let's talk calmly.",
                        "Hello. Let's have a chat.",
                    ],
                    [
                        "Goodbye! Let's talk again!",
                        "Goodbye... let's talk again soon.",
                        "Goodbye. Talk again when things settle.",
                        "Goodbye. Let's talk again.",
                    ],
                    [
                        "You're welcome! Glad I could help!",
                        "You're welcome... tell me if anything comes up.",
                        "You're welcome. Please take it easy.",
                        "You're welcome.",
                    ],
                    [
                        "It's fine! Don't worry about it!",
                        "It's fine... please don't worry.",
                        "It's fine. Please calm down.",
                        "It's fine.",
                    ],
                ],
                "I see, so you're feeling {emotion}.",
            ),
            labels: SpeakerLabels {
                user: "You".to_string(),
                avatar: "Virtual Human".to_string(),
            },
            introduction: "Hello, I am a virtual digital human.".to_string(),
        }
    }

    pub fn keywords(&self, intent: Intent) -> &[String] {
        self.intents
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }
}
