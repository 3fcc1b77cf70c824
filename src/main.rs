fn main() {
    #[cfg(feature = "csr")]
    metodoteca::mount();
}
