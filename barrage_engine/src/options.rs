use serde::{
    Deserialize,
    Serialize,
};

/// Movement, pass-through and lifetime policy of a barrage.
///
/// Spawners may share one value between many barrages, the barrage itself
/// never changes its options.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct BarrageOptions {
    /// Move along the normalized direction by `speed` per tick.
    /// Otherwise the direction itself is the per-tick velocity.
    pub enable_speed: bool,
    pub speed: f32,
    /// Added to the speed after every move.
    pub acceleration: f32,
    pub max_speed: Option<f32>,

    /// Solid blocks do not stop the barrage.
    pub across_block: bool,
    /// Liquid blocks do not stop the barrage.
    pub across_liquid: bool,

    /// Actor and barrage hits do not remove the barrage
    /// until `max_across_count` is exceeded.
    pub acrossable: bool,
    /// `None` is unlimited.
    pub max_across_count: Option<u32>,

    /// Hits from other barrages are not delivered to this one.
    pub barrage_ignored: bool,

    /// Ticks before the barrage times out, `None` lives forever.
    pub max_living_tick: Option<u32>,
    /// Ticks after spawn during which actors and barrages are not hit.
    pub none_hit_box_tick: u32,
}

impl BarrageOptions {
    /// Speed after acceleration and the optional cap.
    pub fn accelerate(&self, speed: f32) -> f32 {
        let speed = speed + self.acceleration;

        match self.max_speed {
            Some(max) => speed.min(max),
            None => speed,
        }
    }
}

impl Default for BarrageOptions {
    fn default() -> Self {
        Self {
            enable_speed: true,
            speed: 1.0,
            acceleration: 0.0,
            max_speed: None,
            across_block: false,
            across_liquid: false,
            acrossable: false,
            max_across_count: None,
            barrage_ignored: false,
            max_living_tick: None,
            none_hit_box_tick: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceleration_is_capped() {
        let options = BarrageOptions {
            acceleration: 0.5,
            max_speed: Some(2.0),
            ..Default::default()
        };

        assert_eq!(options.accelerate(1.0), 1.5);
        assert_eq!(options.accelerate(1.8), 2.0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: BarrageOptions =
            serde_json::from_str(r#"{ "speed": 0.5, "max_living_tick": 40 }"#).unwrap();

        assert_eq!(options.speed, 0.5);
        assert_eq!(options.max_living_tick, Some(40));
        assert_eq!(options.max_across_count, None);
        assert!(options.enable_speed);
    }
}
