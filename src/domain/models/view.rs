use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Stats,
    Chat,
    Coach,
}

impl View {
    pub fn parse(text: &str) -> Option<View> {
        let text = text.trim().to_lowercase();
        if text == "home" {
            return Some(View::Landing);
        }

        return View::iter().find(|e| return e.to_string() == text);
    }
}
