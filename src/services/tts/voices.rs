use std::process::Command;

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    /// Value passed back to the engine to select this voice
    pub id: String,
    pub name: String,
    pub language: String,
}

/// Output dialects of the supported engines' voice listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineFlavor {
    /// `espeak` / `espeak-ng --voices`
    Espeak,
    /// macOS `say -v ?`
    Say,
}

impl EngineFlavor {
    pub fn detect(program: &str) -> Self {
        let stem = std::path::Path::new(program)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(program);
        if stem == "say" {
            EngineFlavor::Say
        } else {
            EngineFlavor::Espeak
        }
    }
}

/// Locale code for a language name hint, e.g. `japanese` -> `ja`.
pub fn locale_code(hint: &str) -> Option<&'static str> {
    match hint {
        "japanese" => Some("ja"),
        "english" => Some("en"),
        _ => None,
    }
}

/// First voice whose name or language contains `hint`, ignoring case.
///
/// Listings that only carry locales (`say` prints `Kyoko  ja_JP`) are then
/// searched for a language starting with the hint's locale code.
pub fn select_voice<'a>(voices: &'a [VoiceInfo], hint: &str) -> Option<&'a VoiceInfo> {
    let hint = hint.to_lowercase();
    if hint.is_empty() {
        return None;
    }
    let by_hint = voices.iter().find(|v| {
        v.name.to_lowercase().contains(&hint) || v.language.to_lowercase().contains(&hint)
    });
    by_hint.or_else(|| {
        let code = locale_code(&hint)?;
        voices.iter().find(|v| {
            let language = v.language.to_lowercase();
            language == code
                || language.starts_with(&format!("{code}_"))
                || language.starts_with(&format!("{code}-"))
        })
    })
}

/// Ask the engine for its voices. Any failure yields an empty list.
pub fn list_voices(program: &str, flavor: EngineFlavor) -> Vec<VoiceInfo> {
    let mut cmd = Command::new(program);
    match flavor {
        EngineFlavor::Espeak => cmd.arg("--voices"),
        EngineFlavor::Say => cmd.args(["-v", "?"]),
    };

    let output = match cmd.output() {
        Ok(out) if out.status.success() => out,
        Ok(out) => {
            debug!(program, status = %out.status, "voice listing exited unsuccessfully");
            return Vec::new();
        }
        Err(e) => {
            debug!(program, error = %e, "voice listing failed");
            return Vec::new();
        }
    };

    let text = String::from_utf8_lossy(&output.stdout);
    match flavor {
        EngineFlavor::Espeak => parse_espeak_voices(&text),
        EngineFlavor::Say => parse_say_voices(&text),
    }
}

/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  ja              --/M      Japanese           jpx/ja
/// ```
pub fn parse_espeak_voices(listing: &str) -> Vec<VoiceInfo> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            if cols.len() < 4 {
                return None;
            }
            Some(VoiceInfo {
                id: cols[1].to_string(),
                name: cols[3].to_string(),
                language: cols[1].to_string(),
            })
        })
        .collect()
}

/// ```text
/// Kyoko               ja_JP    # こんにちは、私の名前はKyokoです。
/// Bad News            en_US    # Hello! My name is Bad News.
/// ```
pub fn parse_say_voices(listing: &str) -> Vec<VoiceInfo> {
    listing
        .lines()
        .filter_map(|line| {
            let head = line.split('#').next()?.trim_end();
            let (name, language) = head.rsplit_once(char::is_whitespace)?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(VoiceInfo {
                id: name.to_string(),
                name: name.to_string(),
                language: language.trim().to_string(),
            })
        })
        .collect()
}
