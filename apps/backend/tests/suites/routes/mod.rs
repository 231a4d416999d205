mod game;
mod sessions;
