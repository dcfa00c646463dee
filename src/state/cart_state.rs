//! Shopping cart state. In-memory only; the cart is not persisted.

/// Product ids added from product cards, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    items: Vec<u64>,
}

impl CartState {
    pub fn add(&mut self, product_id: u64) {
        self.items.push(product_id);
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_counts_every_click() {
        let mut cart = CartState::default();
        cart.add(3);
        cart.add(3);
        cart.add(1);
        assert_eq!(cart.count(), 3);
    }
}
