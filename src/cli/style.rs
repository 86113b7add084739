use console::Style;

const RULE: &str = "=======================================";

/// Colours for the interactive shell. Everything renders plain when colour is off.
#[derive(Debug, Clone)]
pub struct Palette {
    banner: Style,
    success: Style,
    failure: Style,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        let paint = |style: Style| if color { style } else { style.force_styling(false) };
        Self {
            banner: paint(Style::new().blue()),
            success: paint(Style::new().green()),
            failure: paint(Style::new().red()),
        }
    }

    pub fn banner(&self, text: &str) -> String {
        self.banner.apply_to(text).to_string()
    }

    pub fn success(&self, text: &str) -> String {
        self.success.apply_to(text).to_string()
    }

    pub fn failure(&self, text: &str) -> String {
        self.failure.apply_to(text).to_string()
    }

    pub fn welcome(&self) -> Vec<String> {
        [
            RULE,
            "= Pretty Numbers                      =",
            "=                                     =",
            "= Input any number and press enter    =",
            "= Type q at any time to quit          =",
            RULE,
        ]
        .iter()
        .map(|line| self.banner(line))
        .collect()
    }

    pub fn farewell(&self) -> Vec<String> {
        [
            format!("\n{RULE}"),
            "= Thank you for using PrettyNumbers!  =".to_string(),
            format!("{RULE}\n"),
        ]
        .iter()
        .map(|line| self.banner(line))
        .collect()
    }
}
