//! English/Russian UI strings
//!
//! Every user-facing label the plugin produces is a [`Text`] variant so hosts
//! rendering the settings or discovery panel never hard-code a language.

use crate::config::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    BuffSettings,
    DetectedBuffs,
    AllDetectedBuffs,
    Refresh,
    FreezeList,
    ListFrozen,
    ShowAllBuffsWindow,
    Search,
    SortByName,
    SortByStacks,
    SortByType,
    Total,
    AddBuff,
    HarmfulTag,
    BeneficialTag,
    PlayerNotFound,
}

impl Text {
    /// Resolve the string for a language
    pub fn get(self, language: Language) -> &'static str {
        let (en, ru) = match self {
            Self::BuffSettings => ("Buff Settings", "Настройки баффов"),
            Self::DetectedBuffs => ("Detected Buffs", "Обнаруженные баффы"),
            Self::AllDetectedBuffs => ("All Detected Buffs", "Все обнаруженные баффы"),
            Self::Refresh => ("Refresh", "Обновить"),
            Self::FreezeList => ("Freeze List", "Заморозить список"),
            Self::ListFrozen => (
                "List is FROZEN - updates stopped",
                "Список ЗАМОРОЖЕН - обновления остановлены",
            ),
            Self::ShowAllBuffsWindow => ("Show All Buffs Window", "Показать окно всех баффов"),
            Self::Search => ("Search...", "Поиск..."),
            Self::SortByName => ("Sort: Name", "Сортировка: Имя"),
            Self::SortByStacks => ("Sort: Stacks", "Сортировка: Стаки"),
            Self::SortByType => ("Sort: Type", "Сортировка: Тип"),
            Self::Total => ("Total", "Всего"),
            Self::AddBuff => ("Add Buff", "Добавить бафф"),
            Self::HarmfulTag => ("[DEBUFF]", "[ДЕБАФФ]"),
            Self::BeneficialTag => ("[BENEFICIAL]", "[ПОЛЕЗНЫЙ]"),
            Self::PlayerNotFound => ("Player not found or invalid", "Игрок не найден или недоступен"),
        };
        match language {
            Language::English => en,
            Language::Russian => ru,
        }
    }
}
