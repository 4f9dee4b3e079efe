use honggfuzz::fuzz;

use data_uri::{parse, Alphabet, Builder};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            for alphabet in [Alphabet::Standard, Alphabet::UrlSafe] {
                let encoded = Builder::new()
                    .content_type("application/octet-stream")
                    .data(data)
                    .alphabet(alphabet)
                    .build()
                    .unwrap();
                let mut decoded = parse(&encoded).unwrap();
                assert_eq!(decoded.decode(alphabet).unwrap(), data);
            }
        });
    }
}
