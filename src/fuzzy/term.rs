//! Термы лингвистических переменных

/// Терм лингвистической переменной
///
/// Каждая переменная задается своим перечислением: тип перечисления
/// служит идентификатором переменной в хранилище степеней, поэтому
/// одинаковые имена вариантов в разных перечислениях не пересекаются.
///
/// `index` обязан возвращать позицию терма в `ALL`.
pub trait Term: Copy + Eq + core::fmt::Debug + Send + Sync + 'static {
    /// Все термы в порядке объявления
    const ALL: &'static [Self];

    /// Позиция терма в `ALL`
    fn index(self) -> usize;

    /// Имя терма для диагностики
    fn name(self) -> &'static str;

    /// Имя переменной для диагностики
    fn variable_name() -> &'static str;
}

/// Объявление перечисления термов вместе с реализацией [`Term`]
///
/// ```
/// fuzzy_inference::fuzzy_terms! {
///     pub enum Speed { Slow, Medium, Fast }
/// }
/// use fuzzy_inference::Term;
/// assert_eq!(Speed::ALL.len(), 3);
/// assert_eq!(Speed::Fast.name(), "Fast");
/// ```
#[macro_export]
macro_rules! fuzzy_terms {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::fuzzy::Term for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            fn variable_name() -> &'static str {
                stringify!($name)
            }
        }
    };
}
