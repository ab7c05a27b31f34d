mod xor;
