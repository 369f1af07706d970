//! Параметры движка нечеткого вывода

/// Емкости рабочих буферов такта
pub mod capacity {
    /// Максимум пар (переменная, терм) в одном хранилище степеней
    pub const MAX_DEGREES: usize = 64;

    /// Максимум правил в одном наборе
    pub const MAX_RULES: usize = 32;

    /// Максимум термов в одной переменной
    pub const MAX_TERMS: usize = 16;
}

/// Параметры дефаззификации
pub mod defuzz {
    /// Число точек дискретизации для метода центра тяжести
    pub const DEFAULT_RESOLUTION: usize = 201;

    /// Минимально допустимое число точек
    pub const MIN_RESOLUTION: usize = 2;
}

/// Ограничения степеней принадлежности
pub mod degree {
    /// Нижняя граница степени
    pub const MIN: f64 = 0.0;

    /// Верхняя граница степени
    pub const MAX: f64 = 1.0;
}
