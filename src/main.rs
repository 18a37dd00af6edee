fn main() {
    boxfort::game::run();
}
