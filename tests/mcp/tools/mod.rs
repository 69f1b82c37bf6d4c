mod extraction;
mod translations;
