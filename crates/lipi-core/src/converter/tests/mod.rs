
use super::testutil::{assert_letters, assert_sample, assert_text, engine, sample, t, t_with};
