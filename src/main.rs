fn main() {
    space_duel::game::run();
}
