mod persistence;
mod storage;
