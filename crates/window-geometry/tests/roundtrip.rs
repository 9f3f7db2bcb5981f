use std::io::Cursor;

use proptest::{collection::btree_map, prelude::*};
use window_geometry::{Registry, WindowGeometry, decode};

fn rect_strategy() -> impl Strategy<Value = (i32, i32, i32, i32, bool)> {
    (
        any::<i32>(),
        any::<i32>(),
        any::<i32>(),
        any::<i32>(),
        any::<bool>(),
    )
}

proptest! {
    #[test]
    fn store_then_restore_reproduces_every_window(
        rects in btree_map("[a-z][a-z0-9_-]{0,12}", rect_strategy(), 0..16),
    ) {
        let mut source = Registry::new("unused");
        for (id, (x, y, w, h, maximized)) in &rects {
            let g = source.get(id.as_str());
            g.move_to(*x, *y);
            g.resize(*w, *h);
            g.set_maximized(*maximized);
        }
        let mut buf = Vec::new();
        source.store_to(&mut buf).unwrap();

        let mut loaded = Registry::new("unused");
        loaded.restore_from(&mut Cursor::new(buf)).unwrap();

        prop_assert_eq!(loaded.windows(), source.windows());
        for (id, (x, y, w, h, maximized)) in &rects {
            let g: &WindowGeometry = loaded.get(id.as_str());
            prop_assert_eq!(g.position(), (*x, *y));
            prop_assert_eq!(g.size(), (*w, *h));
            prop_assert_eq!(g.is_maximized(), *maximized);
        }
    }

    #[test]
    fn decoding_arbitrary_bytes_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _outcome = decode(&bytes);
    }
}
