use rand::rngs::StdRng;
use rand::SeedableRng;

/// A fresh generator seeded from the browser's `crypto.getRandomValues`.
///
/// The core takes any `Rng`, so only the browser side needs a seed source.
pub fn seeded_rng() -> StdRng {
    StdRng::from_entropy()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use rand::Rng;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn generators_are_independently_seeded() {
        let a: [u64; 4] = seeded_rng().gen();
        let b: [u64; 4] = seeded_rng().gen();
        assert_ne!(a, b);
    }
}
