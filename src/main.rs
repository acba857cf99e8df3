fn main() {
    firoq::cmd::run();
}
