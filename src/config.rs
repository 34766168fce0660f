use crate::grid::CardSize;

const DEFAULT_NAMES: &[&str] = &[
    "Otter", "Heron", "Lynx", "Marten", "Osaka", "Lisbon", "Tromso", "Valparaiso", "Acme Corp",
    "Globex", "Initech", "Ada Lovelace", "Grace Hopper", "Alan Kay",
];

/// Settings used by [`Grid::from_config`](crate::Grid::from_config) to build an initial grid.
#[derive(Clone, Debug)]
pub struct GridConfig {
    pub initial_items: usize,
    /// Relative weights of `[small, big]` when picking a size for a generated card.
    pub size_weights: [u32; 2],
    pub names: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            initial_items: 12,
            size_weights: [1, 0],
            names: DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl GridConfig {
    pub fn initial_items(mut self, count: usize) -> Self {
        self.initial_items = count;
        self
    }

    pub fn size_weights(mut self, small: u32, big: u32) -> Self {
        self.size_weights = [small, big];
        self
    }

    pub fn names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Picks a size according to `size_weights`. Falls back to small when both weights are zero.
    pub(crate) fn pick_size(&self, rng: &mut fastrand::Rng) -> CardSize {
        let [small, big] = self.size_weights;
        let total = small.saturating_add(big);
        if total == 0 || rng.u32(0..total) < small {
            CardSize::Small
        } else {
            CardSize::Big
        }
    }

    /// Picks a display name from the pool, or a numbered placeholder if the pool is empty.
    pub(crate) fn pick_name(&self, rng: &mut fastrand::Rng, fallback_idx: usize) -> String {
        if self.names.is_empty() {
            return format!("Card {}", fallback_idx + 1);
        }
        self.names[rng.usize(0..self.names.len())].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_only_produce_small_cards() {
        let config = GridConfig::default();
        let mut rng = fastrand::Rng::with_seed(7);
        assert!((0..100).all(|_| config.pick_size(&mut rng) == CardSize::Small));
    }

    #[test]
    fn big_only_weights() {
        let config = GridConfig::default().size_weights(0, 3);
        let mut rng = fastrand::Rng::with_seed(7);
        assert!((0..100).all(|_| config.pick_size(&mut rng) == CardSize::Big));
    }

    #[test]
    fn zero_weights_fall_back_to_small() {
        let config = GridConfig::default().size_weights(0, 0);
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(config.pick_size(&mut rng), CardSize::Small);
    }

    #[test]
    fn empty_name_pool_uses_placeholder() {
        let config = GridConfig::default().names(Vec::<String>::new());
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(config.pick_name(&mut rng, 4), "Card 5");
    }

    #[test]
    fn names_come_from_pool() {
        let config = GridConfig::default().names(["x", "y"]);
        let mut rng = fastrand::Rng::with_seed(3);
        for i in 0..20 {
            let name = config.pick_name(&mut rng, i);
            assert!(name == "x" || name == "y");
        }
    }
}
