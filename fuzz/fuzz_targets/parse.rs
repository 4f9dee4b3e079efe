use honggfuzz::fuzz;

use data_uri::{parse_opaque, Alphabet};

fn main() {
    loop {
        fuzz!(|data: &str| {
            if let Ok(uri) = parse_opaque(data) {
                for alphabet in [Alphabet::Standard, Alphabet::UrlSafe] {
                    let mut uri = uri.clone();
                    if uri.decode(alphabet).is_err() {
                        assert!(!uri.is_decoded());
                    }
                }
            }
        });
    }
}
