mod strategies;
mod structural;
