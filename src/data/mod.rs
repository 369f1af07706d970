//! Данные, которыми контроллеры обмениваются с внешней системой

/// Состояние шара относительно центра головы
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BallState {
    pub pos_x: f64, // Смещение по X (м)
    pub pos_z: f64, // Смещение по Z (м)
    pub vel_x: f64, // Скорость по X (м/с)
    pub vel_z: f64, // Скорость по Z (м/с)
}

/// Целевой поворот головы
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeadRotation {
    pub x_deg: f64, // Поворот вокруг X (градусы)
    pub z_deg: f64, // Поворот вокруг Z (градусы)
}

/// Состояние машины относительно трассы
///
/// Отрицательные значения означают левую сторону: машина левее оси,
/// нос смотрит левее направления трассы, поворот трассы налево.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VehicleState {
    pub speed_kmh: f64,            // Скорость (км/ч)
    pub distance_from_path_m: f64, // Отклонение от оси трассы (м)
    pub angle_to_path_deg: f64,    // Угол между носом и трассой (градусы)
    pub curvature: f64,            // Кривизна трассы в текущей точке (1/м)
    pub look_ahead_curvature: f64, // Кривизна трассы впереди (1/м)
}

/// Команды управления машиной
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VehicleCommand {
    pub throttle: f64, // Газ (-1.0 торможение .. 1.0 разгон)
    pub steering: f64, // Руль (-1.0 влево .. 1.0 вправо)
}
