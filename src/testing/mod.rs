pub(crate) mod random_sequences;
