//! Настройки эталонных контроллеров

/// Балансировка шара на голове
pub mod balance {
    /// Половина ширины головы (м)
    pub const HALF_WIDTH_M: f64 = 2.5;

    /// Зона нечувствительности вокруг нуля
    pub const DEAD_ZONE: f64 = 0.01;

    /// Доля диапазона, после которой плечо насыщается
    pub const MAX_ADJUST: f64 = 0.75;

    /// Максимальная скорость шара (м/с)
    pub const MAX_SPEED_MS: f64 = 1.0;

    /// Максимальный угол поворота головы (градусы)
    pub const ABS_MAX_ANGLE_DEG: f64 = 20.0;
}

/// Следование по трассе
pub mod vehicle {
    /// Верхняя граница диапазона скорости (км/ч)
    pub const MAX_SPEED_KMH: f64 = 100.0;

    /// Максимальное учитываемое отклонение от оси трассы (м)
    pub const MAX_DISTANCE_M: f64 = 5.0;

    /// Максимальный учитываемый угол к трассе (градусы)
    pub const MAX_ANGLE_DEG: f64 = 90.0;

    /// Максимальная учитываемая кривизна (1/м)
    pub const MAX_CURVATURE: f64 = 0.1;

    /// Предел выходов газа и руля
    pub const OUTPUT_LIMIT: f64 = 1.0;
}
